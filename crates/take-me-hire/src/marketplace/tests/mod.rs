mod common;
mod routing;
mod shell;
