//! Client-side entry point: installs the panic hook and console logger,
//! then mounts the root component to `<body>`.

use portfolio::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::debug!("mounting portfolio app");
    leptos::mount::mount_to_body(App);
}
