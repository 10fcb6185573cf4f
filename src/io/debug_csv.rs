//! Optional debug stream: one CSV row per grid point that fell inside the
//! shape, occupied or not. Same tmp-and-rename lifecycle as the mmCIF
//! writer.

use crate::error::{NpgenError, Result};
use crate::math::bignum::to_plain_string;
use crate::math::vector::Triple;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Open,
    Initialized,
    Closed,
}

pub struct DebugCsvWriter {
    out: Option<BufWriter<File>>,
    tmp: PathBuf,
    dest: PathBuf,
    stage: Stage,
}

impl DebugCsvWriter {
    /// The debug file sits next to the mmCIF output: the `build_debug_`
    /// prefix goes on the file name, not on its directory.
    pub fn create(stem: &str) -> Result<DebugCsvWriter> {
        let path = Path::new(stem);
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| stem.to_string());
        let dest = dir.join(format!("build_debug_{name}.csv"));
        let tmp = dir.join(format!("build_debug_{name}.csv.tmp"));
        let file = File::create(&tmp)
            .map_err(|e| NpgenError::io(format!("creating {}", tmp.display()), e))?;
        Ok(DebugCsvWriter {
            out: Some(BufWriter::new(file)),
            tmp,
            dest,
            stage: Stage::Open,
        })
    }

    pub fn write_header(&mut self) -> Result<()> {
        if self.stage != Stage::Open {
            return Err(NpgenError::State(
                "debug CSV header may only be written once".into(),
            ));
        }
        self.write("x_frac,y_frac,z_frac,x_cart,y_cart,z_cart,is_occupied\n")?;
        self.stage = Stage::Initialized;
        Ok(())
    }

    pub fn append(&mut self, frac: &Triple, cart: &Triple, occupied: bool) -> Result<()> {
        if self.stage != Stage::Initialized {
            return Err(NpgenError::State(
                "debug row appended outside the initialized stage".into(),
            ));
        }
        let row = format!(
            "{},{},{},{},{},{},{}\n",
            to_plain_string(&frac.x),
            to_plain_string(&frac.y),
            to_plain_string(&frac.z),
            to_plain_string(&cart.x),
            to_plain_string(&cart.y),
            to_plain_string(&cart.z),
            occupied,
        );
        self.write(&row)
    }

    pub fn finalize(mut self) -> Result<PathBuf> {
        let mut out = self
            .out
            .take()
            .ok_or_else(|| NpgenError::State("writer already closed".into()))?;
        out.flush()
            .map_err(|e| NpgenError::io(format!("flushing {}", self.tmp.display()), e))?;
        drop(out);
        fs::rename(&self.tmp, &self.dest).map_err(|e| {
            NpgenError::io(
                format!("renaming {} -> {}", self.tmp.display(), self.dest.display()),
                e,
            )
        })?;
        self.stage = Stage::Closed;
        Ok(self.dest.clone())
    }

    pub fn abort(mut self) -> Result<()> {
        self.out.take();
        self.stage = Stage::Closed;
        fs::remove_file(&self.tmp)
            .map_err(|e| NpgenError::io(format!("removing {}", self.tmp.display()), e))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let out = self
            .out
            .as_mut()
            .ok_or_else(|| NpgenError::State("writer already closed".into()))?;
        out.write_all(text.as_bytes())
            .map_err(|e| NpgenError::io(format!("writing {}", self.tmp.display()), e))
    }
}

impl Drop for DebugCsvWriter {
    fn drop(&mut self) {
        if self.stage != Stage::Closed {
            self.out.take();
            if let Err(e) = fs::remove_file(&self.tmp) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("could not remove {}: {e}", self.tmp.display());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(tag: &str) -> String {
        std::env::temp_dir()
            .join(format!("npgen_csv_{tag}_{}", std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn rows_carry_both_coordinate_systems() {
        let stem = stem("rows");
        let mut w = DebugCsvWriter::create(&stem).unwrap();
        w.write_header().unwrap();
        let frac = Triple::parse("0.5", "-1", "0", 40).unwrap();
        let cart = Triple::parse("2.04", "-4.08", "0", 40).unwrap();
        w.append(&frac, &cart, true).unwrap();
        w.append(&frac, &cart, false).unwrap();
        let path = w.finalize().unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("x_frac,y_frac,z_frac,x_cart,y_cart,z_cart,is_occupied")
        );
        assert_eq!(lines.next(), Some("0.5,-1,0,2.04,-4.08,0,true"));
        assert_eq!(lines.next(), Some("0.5,-1,0,2.04,-4.08,0,false"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn abort_leaves_nothing_behind() {
        let stem = stem("abort");
        let mut w = DebugCsvWriter::create(&stem).unwrap();
        w.write_header().unwrap();
        w.abort().unwrap();
        let dir = std::env::temp_dir();
        let name = Path::new(&stem).file_name().unwrap().to_string_lossy();
        assert!(!dir.join(format!("build_debug_{name}.csv.tmp")).exists());
        assert!(!dir.join(format!("build_debug_{name}.csv")).exists());
    }
}
