fn main() {
    // Stamped into `laserbox::BUILD_DATE` and printed by laserbox-web at startup
    let stamp = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC");
    println!("cargo:rustc-env=BUILD_DATE={}", stamp);
    println!("cargo:rerun-if-changed=build.rs");
}
