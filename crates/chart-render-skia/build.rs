// File: crates/chart-render-skia/build.rs
// Summary: Build script to link required Windows system libraries for Skia/ICU.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW and friends
        println!("cargo:rustc-link-lib=advapi32");
    }
}
