//! Command handlers. All I/O lives here; the core stays pure.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use kanagram_core::{dice, jaccard, ngrams, normalize, ConfigError, SearchEngine};
use tracing::info;

/// Read one candidate per line, skipping blank lines
pub fn read_candidates<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            candidates.push(line.to_string());
        }
    }
    Ok(candidates)
}

/// Read candidates from `path`, or stdin when no path is given
pub fn load_candidates(path: Option<&Path>) -> Result<Vec<String>, Box<dyn Error>> {
    let candidates = match path {
        Some(p) => {
            let file = File::open(p)
                .map_err(|e| format!("cannot open candidates '{}': {}", p.display(), e))?;
            read_candidates(BufReader::new(file))?
        }
        None => read_candidates(io::stdin().lock())?,
    };
    info!(count = candidates.len(), "loaded candidates");
    Ok(candidates)
}

fn check_ngram_size(n: usize) -> Result<(), ConfigError> {
    if n == 0 {
        Err(ConfigError::InvalidNgramSize(n))
    } else {
        Ok(())
    }
}

pub fn run_normalize(texts: &[String], out: &mut dyn Write) -> io::Result<()> {
    for text in texts {
        writeln!(out, "{}\t{}", text, normalize(text))?;
    }
    Ok(())
}

pub fn run_ngrams(text: &str, n: usize, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    check_ngram_size(n)?;
    writeln!(out, "[{}]", ngrams(text, n).join(", "))?;
    Ok(())
}

pub fn run_compare(a: &str, b: &str, n: usize, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    check_ngram_size(n)?;
    writeln!(out, "{} vs {}", a, b)?;
    writeln!(
        out,
        "  jaccard: {:.1}%, dice: {:.1}%",
        jaccard(a, b, n) * 100.0,
        dice(a, b, n) * 100.0
    )?;
    Ok(())
}

/// Options for the `search` command that are not engine settings
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub partial: bool,
    pub limit: Option<usize>,
    pub json: bool,
}

pub fn run_search(
    engine: &SearchEngine,
    query: &str,
    candidates: &[String],
    options: SearchOptions,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    let mut results = if options.partial {
        engine.search_with_partial_match(query, candidates)
    } else {
        engine.search(query, candidates)
    };
    if let Some(limit) = options.limit {
        results.truncate(limit);
    }

    info!(
        query,
        partial = options.partial,
        matched = results.len(),
        "search finished"
    );

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &results)?;
        writeln!(out)?;
    } else {
        for (rank, result) in results.iter().enumerate() {
            writeln!(out, "{:>3}. {} [{}]", rank + 1, result, result.strategy)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn output(f: impl FnOnce(&mut dyn Write)) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    fn catalogue() -> Vec<String> {
        ["富士山", "ふじさん", "フジサン", "東京タワー"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_read_candidates_skips_blank_lines() {
        let input = "東京タワー\r\n\n   \nふじさん\n";
        let candidates = read_candidates(input.as_bytes()).unwrap();
        assert_eq!(candidates, vec!["東京タワー", "ふじさん"]);
    }

    #[test]
    fn test_normalize_output() {
        let text = output(|out| {
            run_normalize(&["トウキョウタワー".to_string(), "１２３ABC".to_string()], out).unwrap()
        });
        assert_eq!(text, "トウキョウタワー\tとうきょうたわー\n１２３ABC\t123abc\n");
    }

    #[test]
    fn test_ngrams_output() {
        let text = output(|out| run_ngrams("東京タワー", 2, out).unwrap());
        assert_eq!(text, "[東京, 京タ, タワ, ワー]\n");
    }

    #[test]
    fn test_zero_ngram_size_is_an_error() {
        let mut buf = Vec::new();
        assert!(run_ngrams("abc", 0, &mut buf).is_err());
        assert!(run_compare("a", "b", 0, &mut buf).is_err());
    }

    #[test]
    fn test_compare_output() {
        let text = output(|out| run_compare("Microsoft", "ＭＩＣＲＯＳＯＦＴ", 2, out).unwrap());
        assert_eq!(
            text,
            "Microsoft vs ＭＩＣＲＯＳＯＦＴ\n  jaccard: 100.0%, dice: 100.0%\n"
        );
    }

    #[test]
    fn test_search_text_output() {
        let engine = SearchEngine::new();
        let options = SearchOptions {
            partial: true,
            ..Default::default()
        };
        let text = output(|out| run_search(&engine, "ふじ", &catalogue(), options, out).unwrap());
        assert_eq!(
            text,
            "  1. ふじさん (45.0%) [substring]\n  2. フジサン (45.0%) [substring]\n"
        );
    }

    #[test]
    fn test_search_json_output_with_limit() {
        let engine = SearchEngine::new();
        let options = SearchOptions {
            partial: true,
            limit: Some(1),
            json: true,
        };
        let text = output(|out| run_search(&engine, "ふじ", &catalogue(), options, out).unwrap());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let results = value.as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["text"], "ふじさん");
        assert_eq!(results[0]["strategy"], "substring");
    }
}
