use chrono::Datelike;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

fn main() {
    // Year shown in the footer copyright line
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Base URL of the contact backend, baked into both the server and WASM builds
    let backend_url =
        std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
    println!("cargo:rustc-env=BACKEND_URL={}", backend_url);

    println!("cargo:rerun-if-env-changed=BACKEND_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
