use std::env;

use lcs_align::LcsEngine;

const SAMPLE_A: &str = "GTCGTTCGGAATGCCGTTGCTCTGTAAA";
const SAMPLE_B: &str = "ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (strand_a, strand_b) = match args.as_slice() {
        [] => (SAMPLE_A.to_string(), SAMPLE_B.to_string()),
        [a, b] => (a.clone(), b.clone()),
        _ => {
            eprintln!("Usage: cargo run --bin dna_compare [-- <strand_a> <strand_b>]");
            std::process::exit(2);
        }
    };

    let alignment = match LcsEngine::new(strand_a.as_bytes(), strand_b.as_bytes()).run() {
        Ok(alignment) => alignment,
        Err(err) => {
            eprintln!("dna_compare: {err}");
            std::process::exit(1);
        }
    };

    println!("strand A: {}", render(&alignment.masked_a(b'*')));
    println!("strand B: {}", render(&alignment.masked_b(b'*')));
    println!("LCS     : {}", render(&alignment.lcs));
    println!("length  : {}", alignment.lcs_len());
}

fn render(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
