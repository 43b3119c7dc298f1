pub mod frequency_counter;
pub mod multiple_pointers;
pub mod recursion;
pub mod sliding_window;
