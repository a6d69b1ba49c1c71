pub mod nucleotides;
