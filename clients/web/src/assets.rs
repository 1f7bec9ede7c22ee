/// Browser half of the live first-name filter. On every keystroke in the
/// `person_first_name` input it walks each row of the listing table except the
/// first (the header) and toggles the row's visibility based on whether the
/// first cell's text contains the query as a literal substring -- the same
/// semantics as `contactbook::listing::filter::row_matches`.
///
/// If the input or the table is missing on a page the handler is simply not
/// wired up.
pub const APPLICATION_JS: &str = r#"document.addEventListener('DOMContentLoaded', function () {
  var input = document.getElementById('person_first_name');
  var table = document.getElementById('people');

  if (!input || !table) {
    return;
  }

  input.addEventListener('input', function () {
    var query = input.value;
    var rows = table.rows;

    // Row 0 is the header, it is never filtered
    for (var i = 1; i < rows.length; i++) {
      var row = rows[i];
      var firstName = row.cells[0].textContent;

      if (firstName.includes(query)) {
        row.style.display = '';
      } else {
        row.style.display = 'none';
      }
    }
  });
});
"#;
