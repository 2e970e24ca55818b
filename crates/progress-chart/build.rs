// File: crates/progress-chart/build.rs
// Summary: Link the Windows registry API that Skia's font manager and ICU loader call into.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, ...
        println!("cargo:rustc-link-lib=advapi32");
    }
}
