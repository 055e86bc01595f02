use super::*;

// Shared test helpers
fn lcg_sizes(seed: u64, len: usize) -> Vec<usize> {
    let mut x = seed;
    let mut out = Vec::new();
    let mut total = 0usize;
    while total < len {
        // LCG: constants from Numerical Recipes
        x = x.wrapping_mul(1664525).wrapping_add(1013904223);
        // chunk size in [1..16]
        let mut n = (((x >> 24) as usize) % 16) + 1;
        if total + n > len {
            n = len - total;
        }
        out.push(n);
        total += n;
    }
    out
}

fn chunk_by_char(s: &str, sizes: &[usize]) -> Vec<String> {
    let mut res = Vec::new();
    let mut iter = s.chars();
    for &n in sizes {
        let mut chunk = String::new();
        for _ in 0..n {
            if let Some(c) = iter.next() {
                chunk.push(c);
            } else {
                break;
            }
        }
        if !chunk.is_empty() {
            res.push(chunk);
        }
    }
    // Append remainder if any
    let rest: String = iter.collect();
    if !rest.is_empty() {
        res.push(rest);
    }
    res
}

fn dashboard() -> serde_json::Value {
    serde_json::json!({
        "type": "container",
        "props": { "direction": "column", "gap": 4 },
        "children": [
            { "type": "text", "props": { "content": "Dashboard \"Q3\" — überblick", "variant": "primary" } },
            { "type": "metric", "props": { "label": "Sales", "content": "$12,000" } },
            { "type": "chart", "props": { "variant": "bar", "data": [
                { "name": "Jan", "value": 10 },
                { "name": "Feb", "value": 12.5 },
                { "name": "Mar", "value": -3 }
            ] } },
            { "type": "divider" },
            { "type": "alert", "props": { "title": "Note", "content": "path C:\\tmp [x] {y}" } }
        ]
    })
}

// Submodules (topic-based)
mod attempt_parse;
mod cli_args;
