use huffman_greedy::HuffmanCodec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text: Vec<char> = "hello, wired world".chars().collect();

    let codec = HuffmanCodec::from_symbols(&text)?;
    println!("tree: {}", codec.tree());

    for (symbol, code) in codec.table().iter() {
        println!("  {:?} -> {}", symbol, code);
    }

    let bits = codec.encode(&text)?;
    println!("code: {}", bits);
    println!(
        "{} bits vs {} bits at 8 bits per symbol",
        bits.len(),
        text.len() * 8
    );

    let decoded: String = codec.decode(&bits)?.into_iter().collect();
    println!("text: {}", decoded);

    if decoded.chars().ne(text.iter().copied()) {
        return Err("decoded text does not match".into());
    }
    Ok(())
}
