use passgen::ClassSet;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub quiet: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    /// Classes switched off with `--no-*`.
    pub excluded: ClassSet,
    /// Exact selection from `--only`; `--no-*` still applies on top.
    pub only: Option<ClassSet>,
}

impl CliFlags {
    /// Final class selection, starting from `base` when `--only` is absent.
    pub fn classes(&self, base: ClassSet) -> ClassSet {
        let mut classes = self.only.unwrap_or(base);
        for class in self.excluded.iter() {
            classes.remove(class);
        }
        classes
    }
}
