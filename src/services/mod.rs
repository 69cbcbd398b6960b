pub mod comparisons;
