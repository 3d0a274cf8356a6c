mod controller;
mod data;
