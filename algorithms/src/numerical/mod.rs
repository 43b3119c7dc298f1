pub mod add_up_to;
