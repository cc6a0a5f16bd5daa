//! Diario Oficial de la Federación source.
//!
//! The DOF rate is published as an HTML table on the Banxico site, so this
//! source scrapes instead of deserializing. The header row of the rate table
//! carries the `renglonTituloColumnas` class, the data row the `renglonNon`
//! class, and within that row the date sits in the second cell and the rate
//! in the sixth. Any deviation from that structure is reported as a
//! [`SourceError`] so a page change degrades this source instead of crashing
//! the report.

use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::errors::SourceError;
use crate::models::RateQuote;
use crate::source::RateSource;

const URL: &str = "https://www.banxico.org.mx/tipcamb/tipCamMIAction.do";
const SOURCE_ID: &str = "diario_oficial";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Cell positions within the data row.
const DATE_CELL: usize = 1;
const RATE_CELL: usize = 5;

lazy_static! {
    static ref HEADER_ROW: Selector =
        Selector::parse("tr.renglonTituloColumnas").expect("static selector");
    static ref DATA_ROW: Selector = Selector::parse("tr.renglonNon").expect("static selector");
    static ref CELL: Selector = Selector::parse("td").expect("static selector");
}

/// Diario Oficial source scraping the published rate table.
pub struct DiarioOficialSource {
    client: Client,
}

impl DiarioOficialSource {
    /// Create a new Diario Oficial source. The page needs no credentials.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for DiarioOficialSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Scrape the published quote out of the rate table.
///
/// The table is located through its header row; the quote is read from the
/// first `renglonNon` row of that same table.
fn quote_from_document(body: &str) -> Result<RateQuote, SourceError> {
    let document = Html::parse_document(body);

    let header = document
        .select(&HEADER_ROW)
        .next()
        .ok_or_else(|| shape("header row not found"))?;
    let table = header
        .parent()
        .and_then(ElementRef::wrap)
        .ok_or_else(|| shape("header row has no enclosing table"))?;

    let row = table
        .select(&DATA_ROW)
        .next()
        .ok_or_else(|| shape("data row not found"))?;
    let cells: Vec<ElementRef> = row.select(&CELL).collect();

    let date = cell_text(&cells, DATE_CELL)?;
    let rate_text = cell_text(&cells, RATE_CELL)?;
    let value = rate_text.parse::<f64>().map_err(|_| SourceError::Rate {
        source: SOURCE_ID,
        value: rate_text,
    })?;

    Ok(RateQuote::new(value, date))
}

fn cell_text(cells: &[ElementRef], index: usize) -> Result<String, SourceError> {
    let cell = cells
        .get(index)
        .ok_or_else(|| shape(&format!("row has no cell {}", index)))?;
    Ok(cell.text().collect::<String>().trim().to_string())
}

fn shape(message: &str) -> SourceError {
    SourceError::Shape {
        source: SOURCE_ID,
        message: message.to_string(),
    }
}

#[async_trait]
impl RateSource for DiarioOficialSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn latest_rate(&self) -> Result<RateQuote, SourceError> {
        debug!("Fetching {} rate table", SOURCE_ID);

        let response = self.client.get(URL).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status {
                source: SOURCE_ID,
                status: response.status(),
            });
        }

        let body = response.text().await?;
        quote_from_document(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"
        <html><body>
        <table>
          <tr class="renglonTituloColumnas">
            <td>&nbsp;</td><td>Fecha</td><td>Publicacion DOF</td>
            <td>Para pagos</td><td>&nbsp;</td><td>Para solventar obligaciones</td>
          </tr>
          <tr class="renglonNon">
            <td>&nbsp;</td><td> 09/09/2020 </td><td>10/09/2020</td>
            <td>21.9262</td><td>&nbsp;</td><td> 20.1838 </td>
          </tr>
          <tr class="renglonPar">
            <td>&nbsp;</td><td>08/09/2020</td><td>09/09/2020</td>
            <td>21.8702</td><td>&nbsp;</td><td>20.1542</td>
          </tr>
        </table>
        </body></html>"#;

    #[test]
    fn test_well_formed_table_yields_a_dated_quote() {
        let quote = quote_from_document(WELL_FORMED).unwrap();
        assert_eq!(quote.value, 20.1838);
        assert_eq!(quote.source_date.as_deref(), Some("09/09/2020"));
    }

    #[test]
    fn test_missing_header_marker_is_a_shape_error() {
        let body = "<html><body><table><tr><td>no marker here</td></tr></table></body></html>";
        assert!(matches!(
            quote_from_document(body),
            Err(SourceError::Shape { source: "diario_oficial", .. })
        ));
    }

    #[test]
    fn test_missing_data_row_is_a_shape_error() {
        let body = r#"
            <table>
              <tr class="renglonTituloColumnas"><td>Fecha</td></tr>
              <tr class="renglonPar"><td>only the even row</td></tr>
            </table>"#;
        match quote_from_document(body) {
            Err(SourceError::Shape { message, .. }) => assert!(message.contains("data row")),
            other => panic!("expected shape error, got {:?}", other.map(|q| q.value)),
        }
    }

    #[test]
    fn test_short_row_is_a_shape_error_not_a_panic() {
        let body = r#"
            <table>
              <tr class="renglonTituloColumnas"><td>Fecha</td></tr>
              <tr class="renglonNon"><td>1</td><td>09/09/2020</td></tr>
            </table>"#;
        assert!(matches!(
            quote_from_document(body),
            Err(SourceError::Shape { .. })
        ));
    }

    #[test]
    fn test_non_numeric_rate_is_a_rate_error() {
        let body = r#"
            <table>
              <tr class="renglonTituloColumnas"><td>Fecha</td></tr>
              <tr class="renglonNon">
                <td>1</td><td>09/09/2020</td><td>2</td><td>3</td><td>4</td><td>N/E</td>
              </tr>
            </table>"#;
        match quote_from_document(body) {
            Err(SourceError::Rate { value, .. }) => assert_eq!(value, "N/E"),
            other => panic!("expected rate error, got {:?}", other.map(|q| q.value)),
        }
    }

    #[test]
    fn test_quote_comes_from_the_marked_table_only() {
        // A renglonNon row in an unrelated earlier table must not win.
        let body = r#"
            <table>
              <tr class="renglonNon">
                <td>1</td><td>01/01/1999</td><td>2</td><td>3</td><td>4</td><td>9.99</td>
              </tr>
            </table>
            <table>
              <tr class="renglonTituloColumnas"><td>Fecha</td></tr>
              <tr class="renglonNon">
                <td>1</td><td>09/09/2020</td><td>2</td><td>3</td><td>4</td><td>20.1838</td>
              </tr>
            </table>"#;
        let quote = quote_from_document(body).unwrap();
        assert_eq!(quote.value, 20.1838);
        assert_eq!(quote.source_date.as_deref(), Some("09/09/2020"));
    }

    #[test]
    fn test_source_id() {
        assert_eq!(DiarioOficialSource::new().id(), "diario_oficial");
    }
}
