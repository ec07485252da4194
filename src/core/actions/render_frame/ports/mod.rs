pub mod gpu_compute;
