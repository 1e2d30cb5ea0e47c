// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_chat_message(size: usize) -> String {
    let base = "## AAPL outlook\n\nShares are **up 3%** after [earnings](https://example.com/aapl).\nAnalysts remain cautious.\n\n- **Risk score**: 42\n- Sector: Technology\n   - Peers: [MSFT](https://example.com/msft)\n\n### Summary\n**[Full report](https://example.com/r)**\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_dense_line(spans: usize) -> String {
    let mut line = String::new();
    for i in 0..spans {
        line.push_str(&format!("**bold {i}** [link {i}](https://example.com/{i}) "));
        if i % 3 == 0 {
            line.push_str(&format!("**[wrapped {i}](https://example.com/w{i})** "));
        }
    }
    line
}
