use crate::domain::scoring::score::Section;
use crate::presentation::http::auth::CurrentAccount;
use crate::presentation::views::{esc, layout};

pub fn score_calculator(session: Option<&CurrentAccount>, flash: Option<&str>) -> String {
    let mut fields = String::new();
    for section in Section::ALL {
        fields.push_str(&format!(
            "<label for=\"{f}\">{label} (0–{max})</label>\
             <input type=\"number\" id=\"{f}\" name=\"{f}\" min=\"0\" max=\"{max}\" value=\"0\" required />",
            f = esc(section.field()),
            label = esc(section.label()),
            max = section.max()
        ));
    }
    let body = format!(
        "<form id=\"score-form\" class=\"card\">{fields}\
         <button type=\"submit\">Calculate</button></form>\n\
         <div id=\"score-result\" class=\"card\" hidden>\
         <p>Total score: <strong id=\"total\"></strong> / 100</p>\
         <p id=\"rating\"></p><p id=\"meaning\"></p></div>\n\
         <script>\n\
         document.getElementById('score-form').addEventListener('submit', function(ev) {{\n\
           ev.preventDefault();\n\
           var body = new URLSearchParams(new FormData(ev.target));\n\
           fetch('/calculate_score', {{ method: 'POST', body: body }})\n\
             .then(function(r) {{ return r.json(); }})\n\
             .then(function(data) {{\n\
               var box = document.getElementById('score-result'); box.hidden = false;\n\
               if (data.error) {{\n\
                 document.getElementById('total').textContent = '-';\n\
                 document.getElementById('rating').textContent = data.error;\n\
                 document.getElementById('meaning').textContent = '';\n\
                 return;\n\
               }}\n\
               document.getElementById('total').textContent = data.total_score;\n\
               document.getElementById('rating').textContent = data.rating;\n\
               document.getElementById('meaning').textContent = data.meaning;\n\
             }});\n\
         }});\n\
         </script>",
        fields = fields
    );
    layout("Compliance Score Calculator", session, flash, &body)
}
