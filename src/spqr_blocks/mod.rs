pub mod outside_structures;
