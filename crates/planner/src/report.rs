//! Plain-text rendering of level histories.
use std::io::{self, Write};

use leveling_core::{Attribute, Level, LevelUpError};

/// Writes one row per level: attributes followed by derived stats.
pub fn write_levels(out: &mut impl Write, levels: &[Level]) -> io::Result<()> {
    write!(out, "{:>3}", "LVL")?;
    for attribute in Attribute::all() {
        write!(out, " {:>4}", attribute.shorthand())?;
    }
    writeln!(out, " {:>5} {:>5} {:>5} {:>5}", "HP", "MP", "SP", "ENC")?;

    for level in levels {
        write!(out, "{:>3}", level.level)?;
        for (_, value) in level.attributes.iter() {
            write!(out, " {value:>4}")?;
        }
        writeln!(
            out,
            " {:>5} {:>5} {:>5} {:>5}",
            level.health, level.magicka, level.stamina, level.encumbrance
        )?;
    }
    Ok(())
}

/// Writes every skill of `level`, grouped under its governing attribute.
pub fn write_skills(out: &mut impl Write, level: &Level) -> io::Result<()> {
    for attribute in Attribute::all() {
        let skills = attribute.skills();
        if skills.is_empty() {
            continue;
        }
        writeln!(out, "{attribute} ({})", level.attribute(attribute))?;
        for &skill in skills {
            writeln!(out, "  {:<12} {:>3}", AsRef::<str>::as_ref(&skill), level.skill(skill))?;
        }
    }
    Ok(())
}

/// Writes one line per rejected level-up.
pub fn write_problems(out: &mut impl Write, problems: &[(usize, LevelUpError)]) -> io::Result<()> {
    for (index, error) in problems {
        writeln!(out, "level {} -> {}: {error}", index + 1, index + 2)?;
    }
    Ok(())
}
