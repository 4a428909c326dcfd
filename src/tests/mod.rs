mod dice;
mod parse;
mod resolve;
