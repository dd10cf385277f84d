use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Missing git metadata (tarball builds) falls back to vergen's defaults.
    EmitBuilder::builder()
        .build_date()
        .cargo_target_triple()
        .git_sha(true)
        .rustc_semver()
        .emit()?;
    println!("cargo:rerun-if-env-changed=VIDSYNC_API_BASE");
    Ok(())
}
