
mod replace;
mod trim;
