pub mod smooth_hsl_gradient;
