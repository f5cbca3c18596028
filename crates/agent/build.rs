//! Records the compiler version for the identity runtime descriptor.

fn main() {
    let version = match rustc_version::version() {
        Ok(version) => version.to_string(),
        Err(e) => {
            println!("cargo:warning=could not determine rustc version: {e}");
            "unknown".to_string()
        }
    };
    println!("cargo:rustc-env=RUSTC_VERSION={version}");
    println!("cargo:rerun-if-changed=build.rs");
}
