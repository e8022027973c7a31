mod mallard_duck;
mod redhead_duck;

pub use mallard_duck::MallardDuck;
pub use redhead_duck::RedheadDuck;
