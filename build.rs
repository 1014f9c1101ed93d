fn main() {
    println!("cargo::rustc-check-cfg=cfg(jetson)");
    println!("cargo:rerun-if-changed=build.rs");

    let target = std::env::var("TARGET").unwrap_or_default();

    if !target.contains("aarch64-unknown-linux") {
        println!("cargo:warning=Building with the V4L2 webcam source (not on Jetson)");
        return;
    }

    // Jetson Nano: the CSI camera is only reachable through nvarguscamerasrc.
    println!("cargo:rustc-cfg=jetson");
}
