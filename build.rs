fn main() {
    // --- Windows resource embedding (version info) ---
    // The shim ships as a windowed executable, so give Explorer something
    // sensible to show in the file properties dialog.
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set("FileDescription", "urldrop handoff shim");
        res.set("ProductName", "urldrop");
        res.set("FileVersion", env!("CARGO_PKG_VERSION"));
        res.set("ProductVersion", env!("CARGO_PKG_VERSION"));
        res.compile().expect("failed to compile Windows resources");
    }
}
