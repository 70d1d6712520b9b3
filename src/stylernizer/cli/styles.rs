use console::Style;
use once_cell::sync::Lazy;

pub struct TreeTheme {
    pub header: Style,
    pub module: Style,
    pub function: Style,
    pub filler: Style,
    pub key: Style,
}

pub static TREE_THEME: Lazy<TreeTheme> = Lazy::new(|| TreeTheme {
    header: Style::new().white().bold(),
    module: Style::new().blue().bold(),
    function: Style::new().yellow(),
    filler: Style::new().dim(),
    key: Style::new().magenta().bold(),
});
