//! Streaming, crash-safe mmCIF output.
//!
//! Lifecycle: create (opens `<name>.mmcif.tmp`) -> write_header ->
//! append* -> finalize (atomic rename to `<name>.mmcif`) or abort
//! (removes the tmp). Ownership enforces the terminal states: finalize
//! and abort consume the writer, and dropping one mid-stream removes the
//! tmp file, so a crash or error path never leaves a final file behind.

use crate::core::atom::Placement;
use crate::core::cell::UnitCell;
use crate::error::{NpgenError, Result};
use crate::geometry::OutputLabels;
use crate::math::bignum::to_plain_string;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Open,
    Initialized,
    Closed,
}

pub struct MmcifWriter {
    out: Option<BufWriter<File>>,
    tmp: PathBuf,
    dest: PathBuf,
    stage: Stage,
}

impl MmcifWriter {
    /// Open `<stem>.mmcif.tmp` for buffered writing.
    pub fn create(stem: &str) -> Result<MmcifWriter> {
        let dest = PathBuf::from(format!("{stem}.mmcif"));
        let tmp = PathBuf::from(format!("{stem}.mmcif.tmp"));
        let file = File::create(&tmp)
            .map_err(|e| NpgenError::io(format!("creating {}", tmp.display()), e))?;
        Ok(MmcifWriter {
            out: Some(BufWriter::new(file)),
            tmp,
            dest,
            stage: Stage::Open,
        })
    }

    /// Emit the data block header, cell metrics, symmetry and the
    /// atom-site loop banner.
    pub fn write_header(&mut self, cell: &UnitCell, labels: &OutputLabels) -> Result<()> {
        if self.stage != Stage::Open {
            return Err(NpgenError::State(
                "mmCIF header may only be written once, directly after open".into(),
            ));
        }
        let (a, b, c) = cell.lengths();
        let (alpha, beta, gamma) = cell.angles();
        let mut text = String::new();
        text.push_str(&format!("data_{}\n", labels.structure_index));
        text.push_str(&format!("_entry.id {}\n", labels.structure_name));
        text.push_str(&format!("_cell.entry_idx {}\n", labels.structure_index));
        text.push_str(&format!("_cell.length_a {}\n", to_plain_string(a)));
        text.push_str(&format!("_cell.length_b {}\n", to_plain_string(b)));
        text.push_str(&format!("_cell.length_c {}\n", to_plain_string(c)));
        text.push_str(&format!("_cell.angle_alpha {}\n", to_plain_string(alpha)));
        text.push_str(&format!("_cell.angle_beta {}\n", to_plain_string(beta)));
        text.push_str(&format!("_cell.angle_gamma {}\n", to_plain_string(gamma)));
        text.push_str(&format!("_symmetry.entry_id {}\n", labels.structure_index));
        text.push_str(&format!(
            "_symmetry.space_group_name_H-M '{}'\n",
            cell.space_group()
        ));
        text.push_str("loop_\n");
        for column in [
            "group_PDB",
            "id",
            "type_symbol",
            "label_atom_id",
            "Cartn_x",
            "Cartn_y",
            "Cartn_z",
            "pdbx_formal_charge",
            "occupancy",
            "auth_asym_id",
            "custom_radius_angstroms",
        ] {
            text.push_str(&format!("_atom_site.{column}\n"));
        }
        self.write(&text)?;
        self.stage = Stage::Initialized;
        Ok(())
    }

    /// One HETATM record per placed atom. Coordinates are full-precision
    /// plain decimals.
    pub fn append(&mut self, placed: &Placement) -> Result<()> {
        if self.stage != Stage::Initialized {
            return Err(NpgenError::State(
                "atom appended outside the initialized stage".into(),
            ));
        }
        let atom = &placed.atom;
        let row = format!(
            "HETATM {idx} {el} {el}{idx} {x} {y} {z} {q} 1 A {r}\n",
            idx = placed.index,
            el = atom.element(),
            x = to_plain_string(&placed.cartesian.x),
            y = to_plain_string(&placed.cartesian.y),
            z = to_plain_string(&placed.cartesian.z),
            q = atom.formal_charge(),
            r = to_plain_string(atom.radius()),
        );
        self.write(&row)
    }

    /// Flush and atomically rename the tmp file over the destination.
    /// After this the final file exists completely or the call failed and
    /// no final file exists.
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

    /// Close and delete the tmp file without producing output.
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

impl Drop for MmcifWriter {
    fn drop(&mut self) {
        if self.stage != Stage::Closed {
            self.out.take();
            if let Err(e) = fs::remove_file(&self.tmp) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    // secondary failure while cleaning up; the original
                    // error is already on its way up
                    warn!("could not remove {}: {e}", self.tmp.display());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::atom::Atom;
    use crate::core::cell::{fcc_basis_sites, UnitCell};
    use crate::math::vector::Triple;

    fn cell() -> UnitCell {
        let basis = fcc_basis_sites(40)
            .unwrap()
            .into_iter()
            .map(|site| Atom::new("Au", "1.44", 0, site, 40).unwrap())
            .collect();
        UnitCell::fcc(basis, "4.08", 40).unwrap()
    }

    fn labels(stem: &str) -> OutputLabels {
        OutputLabels {
            file_name: stem.into(),
            structure_name: "gold".into(),
            structure_index: "7".into(),
        }
    }

    fn stem(tag: &str) -> String {
        std::env::temp_dir()
            .join(format!("npgen_mmcif_{tag}_{}", std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn finalize_renames_atomically_and_header_is_complete() {
        let stem = stem("ok");
        let mut w = MmcifWriter::create(&stem).unwrap();
        w.write_header(&cell(), &labels(&stem)).unwrap();
        let atom = Atom::new("Au", "1.44", 0, Triple::zero(40), 40).unwrap();
        let placed = atom.place(
            0,
            Triple::parse("2.04", "2.04", "0", 40).unwrap(),
            Triple::parse("0.5", "0.5", "0", 40).unwrap(),
        );
        w.append(&placed).unwrap();
        let path = w.finalize().unwrap();
        assert!(path.exists());
        assert!(!PathBuf::from(format!("{stem}.mmcif.tmp")).exists());
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("data_7\n"));
        assert!(text.contains("_cell.length_a 4.08\n"));
        assert!(text.contains("_cell.angle_gamma 90\n"));
        assert!(text.contains("_symmetry.space_group_name_H-M 'F m -3 m'\n"));
        assert!(text.contains("_atom_site.custom_radius_angstroms\n"));
        assert!(text.contains("HETATM 0 Au Au0 2.04 2.04 0 0 1 A 1.44\n"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn append_before_header_is_a_state_error() {
        let stem = stem("early");
        let mut w = MmcifWriter::create(&stem).unwrap();
        let atom = Atom::new("Au", "1.44", 0, Triple::zero(40), 40).unwrap();
        let placed = atom.place(0, Triple::zero(40), Triple::zero(40));
        assert!(matches!(
            w.append(&placed),
            Err(NpgenError::State(_))
        ));
        w.abort().unwrap();
    }

    #[test]
    fn abort_removes_the_tmp_file() {
        let stem = stem("abort");
        let mut w = MmcifWriter::create(&stem).unwrap();
        w.write_header(&cell(), &labels(&stem)).unwrap();
        w.abort().unwrap();
        assert!(!PathBuf::from(format!("{stem}.mmcif.tmp")).exists());
        assert!(!PathBuf::from(format!("{stem}.mmcif")).exists());
    }

    #[test]
    fn dropping_midway_cleans_up() {
        let stem = stem("drop");
        {
            let mut w = MmcifWriter::create(&stem).unwrap();
            w.write_header(&cell(), &labels(&stem)).unwrap();
        }
        assert!(!PathBuf::from(format!("{stem}.mmcif.tmp")).exists());
        assert!(!PathBuf::from(format!("{stem}.mmcif")).exists());
    }

    #[test]
    fn double_header_is_a_state_error() {
        let stem = stem("twice");
        let mut w = MmcifWriter::create(&stem).unwrap();
        w.write_header(&cell(), &labels(&stem)).unwrap();
        assert!(matches!(
            w.write_header(&cell(), &labels(&stem)),
            Err(NpgenError::State(_))
        ));
        w.abort().unwrap();
    }
}
