mod common;
mod controller;
mod validation;
