//! Interactive numbered menu over a compound store.
//!
//! Reads from any `BufRead` and writes to any `Write`, so the same loop runs
//! against the terminal and against scripted input in tests.

use anyhow::Result;
use colored::Colorize;
use molweight_elements::PeriodicTable;
use molweight_formula::CompoundParser;
use molweight_storage::{CompoundStore, InsertOutcome};
use std::io::{BufRead, Write};

use crate::render;

const RULE: &str = "=============================================";

enum MenuControl {
    Continue,
    Exit,
}

pub struct Menu<'a, R, W> {
    parser: CompoundParser<&'a PeriodicTable>,
    store: &'a CompoundStore,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(table: &'a PeriodicTable, store: &'a CompoundStore, input: R, out: W) -> Self {
        Self {
            parser: CompoundParser::new(table),
            store,
            input,
            out,
        }
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            self.header()?;
            write!(self.out, "Select an option (1-4): ")?;
            self.out.flush()?;

            let Some(choice) = self.read_line()? else {
                return self.exit_on_eof();
            };
            let control = match choice.as_str() {
                "1" => self.calculate()?,
                "2" => self.show()?,
                "3" => self.save()?,
                "4" => {
                    self.save()?;
                    writeln!(self.out, "Goodbye.")?;
                    MenuControl::Exit
                }
                other => {
                    writeln!(
                        self.out,
                        "{} `{other}` is not an option; choose a number between 1 and 4.",
                        "error:".red().bold()
                    )?;
                    MenuControl::Continue
                }
            };
            if let MenuControl::Exit = control {
                return Ok(());
            }
        }
    }

    fn header(&mut self) -> Result<()> {
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "{}", "MOLECULAR WEIGHT CALCULATOR".green().bold())?;
        match self.store.last() {
            Some(last) => writeln!(
                self.out,
                "Stored compounds: {} (last: {} {:.3} g/mol)",
                self.store.len(),
                last.formula,
                last.molecular_weight
            )?,
            None => writeln!(
                self.out,
                "Stored compounds: 0 (use option 1 to add one)"
            )?,
        }
        writeln!(self.out, "1. Calculate molecular weight and add compound")?;
        writeln!(self.out, "2. Show stored compounds")?;
        writeln!(self.out, "3. Save")?;
        writeln!(self.out, "4. Save and exit")?;
        writeln!(self.out, "{RULE}")?;
        Ok(())
    }

    fn calculate(&mut self) -> Result<MenuControl> {
        write!(self.out, "Formula: ")?;
        self.out.flush()?;
        let Some(formula) = self.read_line()? else {
            self.exit_on_eof()?;
            return Ok(MenuControl::Exit);
        };

        match self.parser.compound(&formula) {
            Ok(compound) => {
                let verb = match self.store.insert(&compound) {
                    InsertOutcome::Added => "added",
                    InsertOutcome::Replaced => "updated",
                };
                write!(
                    self.out,
                    "{}",
                    render::compound_block(
                        compound.formula(),
                        compound.weight(),
                        compound.composition().iter(),
                        self.parser.table(),
                    )
                )?;
                writeln!(self.out, "{} {verb} {}", "ok".green().bold(), compound.formula())?;
            }
            Err(error) => {
                write!(self.out, "{}", render::parse_failure(&formula, &error, &self.parser))?;
            }
        }
        Ok(MenuControl::Continue)
    }

    fn show(&mut self) -> Result<MenuControl> {
        let compounds = self.store.list();
        if compounds.is_empty() {
            writeln!(self.out, "No compounds stored yet.")?;
        }
        for compound in &compounds {
            write!(
                self.out,
                "{}",
                render::compound_block(
                    &compound.formula,
                    compound.molecular_weight,
                    compound.elements.iter().map(|(s, n)| (s.as_str(), *n)),
                    self.parser.table(),
                )
            )?;
        }
        Ok(MenuControl::Continue)
    }

    fn save(&mut self) -> Result<MenuControl> {
        self.store.save()?;
        writeln!(
            self.out,
            "{} saved {} compound(s) to {}",
            "ok".green().bold(),
            self.store.len(),
            self.store.path().display()
        )?;
        Ok(MenuControl::Continue)
    }

    /// End of input behaves like "save and exit" when there is something to save.
    fn exit_on_eof(&mut self) -> Result<()> {
        writeln!(self.out)?;
        if self.store.is_dirty() {
            self.save()?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molweight_storage::StoreConfig;
    use tempfile::tempdir;

    fn run_script(store: &CompoundStore, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        Menu::new(PeriodicTable::standard(), store, script.as_bytes(), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_then_save_and_exit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("compounds.jsonl");
        let store = CompoundStore::open(StoreConfig::at(&path)).unwrap();

        let out = run_script(&store, "1\nCa(OH)2\n4\n");
        assert!(out.contains("Stored compounds: 0"));
        assert!(out.contains("Ca(OH)2  74.09"), "{out}");
        assert!(out.contains("ok added Ca(OH)2"));
        assert!(out.contains("saved 1 compound(s)"));
        assert!(out.trim_end().ends_with("Goodbye."));

        let reopened = CompoundStore::open(StoreConfig::at(&path)).unwrap();
        assert_eq!(reopened.last().unwrap().formula, "Ca(OH)2");
    }

    #[test]
    fn header_reports_last_compound() {
        let dir = tempdir().unwrap();
        let store = CompoundStore::open(StoreConfig::at(dir.path().join("c.jsonl"))).unwrap();

        let out = run_script(&store, "1\nH2O\n3\n4\n");
        assert!(out.contains("Stored compounds: 1 (last: H2O 18.015 g/mol)"), "{out}");
    }

    #[test]
    fn invalid_formula_is_reported_and_not_stored() {
        let dir = tempdir().unwrap();
        let store = CompoundStore::open(StoreConfig::at(dir.path().join("c.jsonl"))).unwrap();

        let out = run_script(&store, "1\nNA\n2\n4\n");
        assert!(out.contains("error: NA: Format Error"), "{out}");
        assert!(out.contains("No compounds stored yet."));
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_option_keeps_looping() {
        let dir = tempdir().unwrap();
        let store = CompoundStore::open(StoreConfig::at(dir.path().join("c.jsonl"))).unwrap();

        let out = run_script(&store, "9\n4\n");
        assert!(out.contains("`9` is not an option"));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn end_of_input_saves_pending_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("c.jsonl");
        let store = CompoundStore::open(StoreConfig::at(&path)).unwrap();

        run_script(&store, "1\nCO2\n");
        assert!(!store.is_dirty());
        assert!(path.exists());
    }
}
