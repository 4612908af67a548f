use std::fs;
use std::path::Path;

/// Copies the trunk output into `static/dist` so `include_dir!` can embed it.
/// The directory is created even without a frontend build; the host then
/// serves 404 and logs a warning.
fn main() {
    let out_dir = Path::new("static/dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static/dist");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).content_only(true),
        )
        .expect("copy frontend bundle");
    } else {
        fs::create_dir_all(out_dir).expect("create static/dist");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
