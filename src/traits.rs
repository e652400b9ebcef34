pub mod board {
    use std::fmt::Write;

    use colored::Colorize;

    use crate::configuration::Configuration;

    pub trait DebugPrintable {
        fn render_board(&self) -> String;

        fn debug_print(&self) {
            print!("{}", self.render_board());
        }
    }

    fn rule(out: &mut String, columns: usize, left: char, middle: char, right: char) {
        out.push(left);
        for col in 0..columns {
            out.push_str("────");
            if col < columns - 1 {
                out.push(middle);
            }
        }
        out.push(right);
        out.push('\n');
    }

    impl<const ROWS: usize, const COLS: usize> DebugPrintable for Configuration<ROWS, COLS> {
        fn render_board(&self) -> String {
            let mut out = String::new();

            rule(&mut out, COLS, '┌', '┬', '┐');
            for row in 0..ROWS {
                out.push('│');
                for col in 0..COLS {
                    match self.tile_at_rc(row, col) {
                        0 => {
                            let _ = write!(out, " {} ", "  ".on_green());
                        }
                        tile => {
                            let _ = write!(out, " {:>2} ", tile);
                        }
                    }
                    out.push('│');
                }
                out.push('\n');

                if row < ROWS - 1 {
                    rule(&mut out, COLS, '├', '┼', '┤');
                }
            }
            rule(&mut out, COLS, '└', '┴', '┘');

            out
        }
    }
}
