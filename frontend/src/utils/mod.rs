pub mod dom;
pub mod frame_loop;
pub mod listener;
pub mod visibility;
