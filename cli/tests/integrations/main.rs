mod eval;
mod repl;
mod tokens;
