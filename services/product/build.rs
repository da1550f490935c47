fn main() {
    // 服务端与客户端都生成：客户端用于集成测试
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["../../proto/product/v1/product.proto"], &["../../proto"])
        .expect("Failed to compile product.proto");

    println!("cargo:rerun-if-changed=../../proto/product/v1/product.proto");
}
