//! Terminal setup and restoration

/// Install a panic hook that puts the terminal back before the panic report
pub fn install_panic_hook() {
    let report = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        report(info);
    }));
}
