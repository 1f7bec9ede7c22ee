//! HTML rendering for the contact book pages. Each function returns a full
//! document; the pages are small enough that plain string building beats
//! pulling in a template engine.

use contactbook::{listing::filter::ListingRow, model::person::Person};

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <title>{title}</title>\n\
         <script src=\"/javascripts/application.js\"></script>\n\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n",
        title = escape_html(title),
        body = body,
    )
}

/// The listing page: the live-filter input plus one table where the first row
/// is the header and every data row carries the person's first name in its
/// first cell. The server always renders the unfiltered state (every row
/// visible), the browser script takes over from there.
pub fn people_index(people: &[Person]) -> String {
    let mut body = String::new();

    body.push_str("<h1>Listing people</h1>\n");
    body.push_str(
        "<p>\n\
         <label for=\"person_first_name\">Person first name</label>\n\
         <input type=\"text\" id=\"person_first_name\" name=\"person_first_name\" />\n\
         </p>\n",
    );

    body.push_str(
        "<table id=\"people\">\n\
         <tr>\n\
         <th>First name</th>\n\
         <th>Last name</th>\n\
         <th>Phone number</th>\n\
         <th></th>\n\
         <th></th>\n\
         </tr>\n",
    );

    for person in people {
        let row = ListingRow::from_person(person);

        let style = match row.is_visible() {
            true => "",
            false => " style=\"display:none\"",
        };

        body.push_str(&format!(
            "<tr{style}>\n\
             <td>{first_name}</td>\n\
             <td>{last_name}</td>\n\
             <td>{phone_number}</td>\n\
             <td><a href=\"/people/{id}\">Show</a></td>\n\
             <td><a href=\"/people/{id}/edit\">Edit</a></td>\n\
             </tr>\n",
            style = style,
            first_name = escape_html(&row.first_name_cell),
            last_name = escape_html(&person.last_name),
            phone_number = escape_html(&person.phone_number),
            id = person.id,
        ));
    }

    body.push_str("</table>\n<br />\n<a href=\"/people/new\">New Person</a>\n");

    layout("Listing people", &body)
}

pub fn person_show(person: &Person) -> String {
    let body = format!(
        "<p>\n<b>First name:</b>\n{first_name}\n</p>\n\
         <p>\n<b>Last name:</b>\n{last_name}\n</p>\n\
         <p>\n<b>Phone number:</b>\n{phone_number}\n</p>\n\
         <a href=\"/people/{id}/edit\">Edit</a> |\n\
         <a href=\"/people\">Back</a>\n",
        first_name = escape_html(&person.first_name),
        last_name = escape_html(&person.last_name),
        phone_number = escape_html(&person.phone_number),
        id = person.id,
    );

    layout(
        &format!("{} {}", person.first_name, person.last_name),
        &body,
    )
}

pub fn person_new() -> String {
    let body = format!(
        "<h1>New person</h1>\n\
         {form}\
         <a href=\"/people\">Back</a>\n",
        form = person_form("/people", "Create Person", "", "", ""),
    );

    layout("New person", &body)
}

pub fn person_edit(person: &Person) -> String {
    let body = format!(
        "<h1>Editing person</h1>\n\
         {form}\
         <a href=\"/people/{id}\">Show</a> |\n\
         <a href=\"/people\">Back</a>\n",
        form = person_form(
            &format!("/people/{}", person.id),
            "Update Person",
            &person.first_name,
            &person.last_name,
            &person.phone_number,
        ),
        id = person.id,
    );

    layout("Editing person", &body)
}

fn person_form(
    action: &str,
    submit_label: &str,
    first_name: &str,
    last_name: &str,
    phone_number: &str,
) -> String {
    format!(
        "<form action=\"{action}\" method=\"post\">\n\
         <p>\n\
         <label for=\"person_first_name\">First name</label><br />\n\
         <input type=\"text\" id=\"person_first_name\" name=\"person[first_name]\" value=\"{first_name}\" />\n\
         </p>\n\
         <p>\n\
         <label for=\"person_last_name\">Last name</label><br />\n\
         <input type=\"text\" id=\"person_last_name\" name=\"person[last_name]\" value=\"{last_name}\" />\n\
         </p>\n\
         <p>\n\
         <label for=\"person_phone_number\">Phone number</label><br />\n\
         <input type=\"text\" id=\"person_phone_number\" name=\"person[phone_number]\" value=\"{phone_number}\" />\n\
         </p>\n\
         <p>\n\
         <input type=\"submit\" value=\"{submit_label}\" />\n\
         </p>\n\
         </form>\n",
        action = escape_html(action),
        submit_label = escape_html(submit_label),
        first_name = escape_html(first_name),
        last_name = escape_html(last_name),
        phone_number = escape_html(phone_number),
    )
}

pub fn error_page(title: &str, message: &str) -> String {
    let body = format!(
        "<h1>{title}</h1>\n\
         <p>{message}</p>\n\
         <a href=\"/people\">Back</a>\n",
        title = escape_html(title),
        message = escape_html(message),
    );

    layout(title, &body)
}
