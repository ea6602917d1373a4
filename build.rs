fn main() {
    tauri_build::try_build(tauri_build::Attributes::new().app_manifest(
        tauri_build::AppManifest::new()
            .commands(&["key_forwarder_key_down", "key_forwarder_set_editing"]),
    ))
    .expect("failed to run tauri build script");
}
