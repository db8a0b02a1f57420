// File: crates/chart-core/build.rs
// Summary: Build script to link required Windows system libraries when Skia raster export is enabled.

fn main() {
    let raster = std::env::var_os("CARGO_FEATURE_RASTER").is_some();
    let windows = std::env::var("CARGO_CFG_TARGET_OS").map(|os| os == "windows").unwrap_or(false);
    if raster && windows {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
