fn main() {
    // 只需要 Product 服务的客户端
    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .compile_protos(&["../../proto/product/v1/product.proto"], &["../../proto"])
        .expect("Failed to compile product.proto");

    println!("cargo:rerun-if-changed=../../proto/product/v1/product.proto");
}
