// FMHY desktop shell
// Hosts fmhy.net inside a native window through a bundled entry document.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    fmhy_desktop_lib::run()
}
