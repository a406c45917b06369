pub mod synthetic_segmentation;
