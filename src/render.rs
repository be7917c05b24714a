//! Listing output as plain-text columns or an HTML table
//!
//! Field values are written verbatim. The HTML table does not escape
//! markup characters in titles or descriptions.

use std::io::{self, Write};

use crate::data::Movie;
use crate::filter::MovieFilter;

/// Width of the year column in text output
pub const YEAR_WIDTH: usize = 10;

/// Width of the title column in text output; longer titles are cut
pub const TITLE_WIDTH: usize = 40;

/// How the listing is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width columns: year, title, description
    #[default]
    Text,
    /// An HTML `<table>` with one row per movie
    Html,
}

/// Formats one movie as a fixed-width text line (no trailing newline)
pub fn text_row(movie: &Movie) -> String {
    let title: String = movie.name.chars().take(TITLE_WIDTH).collect();
    format!(
        "{:<year_width$} {:<title_width$} {}",
        movie.release_year.to_string(),
        title,
        movie.description(),
        year_width = YEAR_WIDTH,
        title_width = TITLE_WIDTH,
    )
}

fn write_html_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "<table>")?;
    writeln!(out, "  <tr>")?;
    writeln!(out, "    <th>Year</th>")?;
    writeln!(out, "    <th>Title</th>")?;
    writeln!(out, "    <th>Description</th>")?;
    writeln!(out, "  </tr>")
}

fn write_html_row<W: Write>(out: &mut W, movie: &Movie) -> io::Result<()> {
    writeln!(out, "  <tr>")?;
    writeln!(out, "    <td>{}</td>", movie.release_year)?;
    writeln!(out, "    <td>{}</td>", movie.name)?;
    writeln!(out, "    <td>{}</td>", movie.description())?;
    writeln!(out, "  </tr>")
}

/// Writes every movie that passes `filter` to `out` in the given format
///
/// Returns the number of movies written.
pub fn write_listing<W: Write>(
    out: &mut W,
    movies: &[Movie],
    filter: &MovieFilter,
    format: OutputFormat,
) -> io::Result<usize> {
    if format == OutputFormat::Html {
        write_html_header(out)?;
    }

    let mut written = 0;
    for movie in filter.apply(movies) {
        match format {
            OutputFormat::Text => writeln!(out, "{}", text_row(movie))?,
            OutputFormat::Html => write_html_row(out, movie)?,
        }
        written += 1;
    }

    if format == OutputFormat::Html {
        writeln!(out, "</table>")?;
    }

    out.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn render(movies: &[Movie], filter: &MovieFilter, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_listing(&mut out, movies, filter, format).expect("Write to Vec should succeed");
        String::from_utf8(out).expect("Output should be UTF-8")
    }

    #[test]
    fn test_text_row_columns() {
        let movie = Movie::new(1942, "Casablanca").with_description("Of all the gin joints.");

        let row = text_row(&movie);

        assert_eq!(
            row,
            format!("1942       {:<40} Of all the gin joints.", "Casablanca")
        );
        assert_eq!(&row[..11], "1942       ");
        assert_eq!(row.find("Of all"), Some(YEAR_WIDTH + 1 + TITLE_WIDTH + 1));
    }

    #[test]
    fn test_text_row_truncates_long_titles() {
        let long = "Dr. Strangelove or: How I Learned to Stop Worrying and Love the Bomb";
        let movie = Movie::new(1964, long);

        let row = text_row(&movie);

        assert!(row.contains("Dr. Strangelove or: How I Learned to Sto "));
        assert!(!row.contains("Worrying"));
    }

    #[test]
    fn test_text_row_truncates_by_character() {
        let title = "é".repeat(45);
        let movie = Movie::new(1960, title);

        let row = text_row(&movie);

        assert_eq!(row.chars().filter(|c| *c == 'é').count(), TITLE_WIDTH);
    }

    #[test]
    fn test_text_row_missing_description() {
        let movie = Movie::new(1933, "King Kong");
        let row = text_row(&movie);
        assert!(row.ends_with(' '));
        assert_eq!(row.chars().count(), YEAR_WIDTH + 1 + TITLE_WIDTH + 1);
    }

    #[test]
    fn test_text_listing_skips_excluded_movies() {
        let movies = vec![
            Movie::new(1949, "The Third Man"),
            Movie::new(1950, "All About Eve"),
        ];
        let filter = MovieFilter {
            before_year: Some(1950),
            ..Default::default()
        };

        let output = render(&movies, &filter, OutputFormat::Text);

        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("The Third Man"));
        assert!(!output.contains("All About Eve"));
    }

    #[test]
    fn test_html_listing_structure() {
        let movies = vec![
            Movie::new(1931, "Dracula")
                .with_genres(["Horror"])
                .with_description("The count."),
            Movie::new(1934, "The Thin Man").with_genres(["Comedy"]),
        ];
        let filter = MovieFilter {
            genres: Some(BTreeSet::from(["Horror".to_string()])),
            ..Default::default()
        };

        let output = render(&movies, &filter, OutputFormat::Html);

        let expected = "\
<table>
  <tr>
    <th>Year</th>
    <th>Title</th>
    <th>Description</th>
  </tr>
  <tr>
    <td>1931</td>
    <td>Dracula</td>
    <td>The count.</td>
  </tr>
</table>
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_html_listing_with_no_matches_still_has_table() {
        let movies = vec![Movie::new(1931, "Dracula")];
        let filter = MovieFilter {
            after_year: Some(2000),
            ..Default::default()
        };

        let output = render(&movies, &filter, OutputFormat::Html);

        assert!(output.starts_with("<table>\n"));
        assert!(output.ends_with("</table>\n"));
        assert!(!output.contains("<td>"));
    }

    #[test]
    fn test_html_does_not_escape() {
        let movies = vec![Movie::new(1936, "Modern Times").with_description("<b>Tramp</b> & co")];

        let output = render(&movies, &MovieFilter::default(), OutputFormat::Html);

        assert!(output.contains("<td><b>Tramp</b> & co</td>"));
    }

    #[test]
    fn test_html_keeps_full_title() {
        let long = "Dr. Strangelove or: How I Learned to Stop Worrying and Love the Bomb";
        let movies = vec![Movie::new(1964, long)];

        let output = render(&movies, &MovieFilter::default(), OutputFormat::Html);

        assert!(output.contains(long));
    }

    #[test]
    fn test_write_listing_returns_count() {
        let movies = vec![
            Movie::new(1939, "Stagecoach"),
            Movie::new(1940, "The Grapes of Wrath"),
            Movie::new(1962, "Lawrence of Arabia"),
        ];
        let filter = MovieFilter {
            before_year: Some(1950),
            ..Default::default()
        };

        let mut out = Vec::new();
        let count = write_listing(&mut out, &movies, &filter, OutputFormat::Text).unwrap();

        assert_eq!(count, 2);
    }
}
