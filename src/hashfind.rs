use std::collections::HashMap;
use std::fs;
use std::path::Path;
use anyhow::{anyhow, Result};

use crate::djbhash::HashVariant;

/// Given a hash, brute force the first candidate name that produces it.
pub fn find_hash<'a, S: AsRef<str>>(hash: u32, candidates: &'a [S], variant: HashVariant) -> Option<&'a str> {
    candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .find(|&candidate| variant.hash(candidate) == hash)
}

/// Read a newline separated list of names. Blank lines and `#` comments are skipped.
pub fn load_wordlist<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|err| anyhow!("Could not read word list {}: {}", path.display(), err))?;

    Ok(parse_wordlist(&contents))
}

fn parse_wordlist(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Bucket table keyed by hash, as a case-insensitive symbol lookup would use it.
pub struct HashIndex {
    pub variant: HashVariant,
    buckets: HashMap<u32, Vec<String>>,
}

impl HashIndex {
    pub fn build<S: AsRef<str>>(names: &[S], variant: HashVariant) -> HashIndex {
        let mut buckets: HashMap<u32, Vec<String>> = HashMap::new();

        for name in names {
            let name = name.as_ref();
            buckets.entry(variant.hash(name)).or_default().push(name.to_string());
        }

        HashIndex { variant, buckets }
    }

    /// Names sharing `hash`, in insertion order. Empty if there are none.
    pub fn lookup(&self, hash: u32) -> &[String] {
        self.buckets.get(&hash).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Buckets holding names that differ by more than ASCII case, sorted by hash.
    pub fn collisions(&self) -> Vec<(u32, &[String])> {
        let mut collisions: Vec<(u32, &[String])> = self.buckets
            .iter()
            .filter(|(_, names)| {
                names.iter().any(|name| !name.eq_ignore_ascii_case(&names[0]))
            })
            .map(|(&hash, names)| (hash, names.as_slice()))
            .collect();

        collisions.sort_by_key(|&(hash, _)| hash);
        collisions
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::djbhash::string_hash;

    const NAMES: &[&str] = &["LoadLibraryA", "GetProcAddress", "MessageBoxW", "VirtualAlloc"];

    #[test]
    fn test_hash_find() {
        let api = find_hash(0xA486EDF6, NAMES, HashVariant::Script).unwrap();
        assert!(api.eq("MessageBoxW"));
        assert!(find_hash(0xA486EDF6, NAMES, HashVariant::Native).is_none());
        assert!(find_hash(1, NAMES, HashVariant::Script).is_none());
    }

    #[test]
    fn test_hash_find_case_insensitive() {
        let hash = string_hash("virtualalloc");
        assert_eq!(find_hash(hash, NAMES, HashVariant::Script), Some("VirtualAlloc"));
    }

    #[test]
    fn test_parse_wordlist() {
        let words = parse_wordlist("# kernel32\nLoadLibraryA\n\n  GetProcAddress  \r\n#done\n");
        assert_eq!(words, vec!["LoadLibraryA", "GetProcAddress"]);
    }

    #[test]
    fn test_load_wordlist_missing() {
        let err = load_wordlist("/nonexistent/strhash/words.txt").unwrap_err();
        assert!(err.to_string().contains("words.txt"));
    }

    #[test]
    fn test_load_wordlist_file() {
        let path = std::env::temp_dir().join(format!("strhash-words-{}.txt", std::process::id()));
        fs::write(&path, "alpha\nBeta\n").unwrap();
        let words = load_wordlist(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(words, vec!["alpha", "Beta"]);
    }

    #[test]
    fn test_hash_index_lookup() {
        let index = HashIndex::build(NAMES, HashVariant::Script);
        assert_eq!(index.len(), NAMES.len());
        assert!(!index.is_empty());
        assert_eq!(index.lookup(string_hash("MESSAGEBOXW")), ["MessageBoxW".to_string()]);
        assert!(index.lookup(0).is_empty());
    }

    #[test]
    fn test_hash_index_collisions() {
        // only the last five units reach the low 32 bits
        let names = ["hello", "HELLO", "zhello", "abcdefghijk", "zbcdefghijk", "other"];
        let index = HashIndex::build(&names, HashVariant::Script);

        let collisions = index.collisions();
        assert_eq!(collisions.len(), 2);
        assert_eq!(collisions[0].0, 1721666154);
        assert_eq!(collisions[0].1, ["abcdefghijk".to_string(), "zbcdefghijk".to_string()]);
        assert_eq!(collisions[1].0, 1737669358);
        assert_eq!(collisions[1].1.len(), 3);

        let case_only = HashIndex::build(&["Name", "NAME"], HashVariant::Script);
        assert!(case_only.collisions().is_empty());
        assert_eq!(case_only.len(), 1);
    }
}
