mod member;
mod target;
