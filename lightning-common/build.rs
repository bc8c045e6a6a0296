fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = prost_build::Config::new();
    // Use the vendored protoc unless the caller already points at one
    if std::env::var_os("PROTOC").is_none() {
        config.protoc_executable(protoc_bin_vendored::protoc_bin_path()?);
    }

    // Compile proto files
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos_with_config(config, &["../proto/bridge.proto"], &["../proto"])?;

    println!("cargo:rerun-if-changed=../proto/bridge.proto");
    Ok(())
}
