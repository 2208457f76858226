pub mod fibonacci_heap;

pub use fibonacci_heap::FibonacciHeap;
