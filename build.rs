use shadow_rs::{BuildPattern, ShadowBuilder};

fn main() -> shadow_rs::SdResult<()> {
    ShadowBuilder::builder()
        .build_pattern(BuildPattern::RealTime)
        .build()?;

    // Branch name for CI builds from a detached checkout
    println!("cargo:rerun-if-env-changed=GITHUB_REF_NAME");
    if let Ok(ref_name) = std::env::var("GITHUB_REF_NAME") {
        println!("cargo:rustc-env=GITHUB_REF_NAME={}", ref_name);
    }

    Ok(())
}
