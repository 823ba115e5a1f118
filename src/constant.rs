pub(crate) const OPTION_PREFIX: char = '-';
pub(crate) const ASSIGNMENT: char = '=';
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_LONG: &str = "help";
pub(crate) const HELP_MESSAGE: &str = "Print this help dialog.";
// Lists start with room for 8 items, then double.
pub(crate) const INITIAL_LIST_CAPACITY: usize = 8;
