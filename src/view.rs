//! The view renderer: an ordered list of students plus an optional
//! record being edited, turned into the management page.
//!
//! The contract with the rest of the app is [`render`] alone.

use std::fmt::Write;

use crate::student::Student;

/// Escape a value for interpolation into HTML text or attributes.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the management page: the add/edit form followed by the
/// listing table. When `editing` is set, the form is pre-filled with
/// that record and switches to update mode.
pub fn render(students: &[Student], editing: Option<&Student>) -> String {
    let mut page = String::with_capacity(2048);

    page.push_str(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <title>Student Management</title>\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <link href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css\" rel=\"stylesheet\">\n\
         </head>\n\
         <body class=\"bg-light\">\n\
         <div class=\"container mt-5\">\n\
         <h1 class=\"text-center mb-4\">Student Management</h1>\n",
    );

    render_form(&mut page, editing);
    render_table(&mut page, students);

    page.push_str("</div>\n</body>\n</html>\n");
    page
}

fn render_form(page: &mut String, editing: Option<&Student>) {
    let (id, name, email, phone, mark) = match editing {
        Some(s) => (
            s.id.to_string(),
            escape(&s.name),
            escape(&s.email),
            escape(&s.phone),
            s.mark.to_string(),
        ),
        None => Default::default(),
    };
    let button = if editing.is_some() {
        "Update Student"
    } else {
        "Add Student"
    };

    let _ = write!(
        page,
        "<div class=\"card shadow mb-4\"><div class=\"card-body\">\n\
         <form method=\"POST\" action=\"/add_or_update\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
         <div class=\"mb-3\"><input type=\"text\" name=\"name\" class=\"form-control\" placeholder=\"Name\" required value=\"{name}\"></div>\n\
         <div class=\"mb-3\"><input type=\"email\" name=\"email\" class=\"form-control\" placeholder=\"Email\" required value=\"{email}\"></div>\n\
         <div class=\"mb-3\"><input type=\"text\" name=\"phone\" class=\"form-control\" placeholder=\"Phone\" required value=\"{phone}\"></div>\n\
         <div class=\"mb-3\"><input type=\"number\" name=\"mark\" class=\"form-control\" placeholder=\"Mark\" required value=\"{mark}\"></div>\n\
         <button class=\"btn btn-primary\">{button}</button>\n",
    );
    if editing.is_some() {
        page.push_str("<a href=\"/\" class=\"btn btn-secondary mt-2\">Cancel</a>\n");
    }
    page.push_str("</form>\n</div></div>\n");
}

fn render_table(page: &mut String, students: &[Student]) {
    page.push_str(
        "<h2 class=\"text-center mb-3\">All Students</h2>\n\
         <div class=\"table-responsive\">\n\
         <table class=\"table table-striped table-hover\">\n\
         <thead class=\"table-dark\"><tr>\
         <th>ID</th><th>Name</th><th>Email</th><th>Phone</th><th>Mark</th><th>Action</th>\
         </tr></thead>\n<tbody>\n",
    );

    for s in students {
        let _ = write!(
            page,
            "<tr><td>{id}</td><td>{name}</td><td>{email}</td><td>{phone}</td><td>{mark}</td>\
             <td><a href=\"/edit/{id}\" class=\"btn btn-sm btn-warning\">Edit</a> \
             <a href=\"/delete/{id}\" class=\"btn btn-sm btn-danger\" \
             onclick=\"return confirm('Are you sure?')\">Delete</a></td></tr>\n",
            id = s.id,
            name = escape(&s.name),
            email = escape(&s.email),
            phone = escape(&s.phone),
            mark = s.mark,
        );
    }
    if students.is_empty() {
        page.push_str(
            "<tr><td colspan=\"6\" class=\"text-center text-muted\">No students found</td></tr>\n",
        );
    }

    page.push_str("</tbody>\n</table>\n</div>\n");
}
