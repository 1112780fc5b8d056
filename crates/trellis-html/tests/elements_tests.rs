//! Rendering of the element constructors.

use trellis_html::prelude::*;

// ========== Structure ==========

#[test]
fn test_div_with_id_class_and_text() {
    let el = div().id("x").class(["a", "b"]).add_content("hi");
    assert_eq!(el.render(), r#"<div id="x" class="a b">hi</div>"#);
}

#[test]
fn test_void_elements_self_close() {
    assert_eq!(br().render(), "<br/>");
    assert_eq!(hr().class(["rule"]).render(), r#"<hr class="rule"/>"#);
    assert_eq!(
        img().src("a.png").alt("A").render(),
        r#"<img src="a.png" alt="A"/>"#
    );
}

#[test]
fn test_object_is_void() {
    let el = object().data_url("a.pdf").r#type("application/pdf");
    assert_eq!(el.render(), r#"<object data="a.pdf" type="application/pdf"/>"#);
}

#[test]
fn test_list_from_iterator() {
    let list = ul().add_contents((1..=3).map(|n: i32| li().add_content(n)));
    assert_eq!(list.render(), "<ul><li>1</li><li>2</li><li>3</li></ul>");
}

#[test]
fn test_container_and_component_are_transparent() {
    let fragment = container()
        .add_content(p().add_content("a"))
        .add_content("b");
    assert_eq!(fragment.render(), "<p>a</p>b");

    let card = component().add_content(section().add_content(fragment));
    assert_eq!(card.render(), "<section><p>a</p>b</section>");
}

#[test]
fn test_html_root_writes_doctype_once() {
    let page = html()
        .lang("en")
        .add_content(head().add_content(meta().charset("utf-8")))
        .add_content(body().add_content(main().add_content("x")));
    assert_eq!(
        page.render(),
        concat!(
            "<!DOCTYPE html><html lang=\"en\">",
            "<head><meta charset=\"utf-8\"/></head>",
            "<body><main>x</main></body></html>",
        )
    );
    assert_eq!(page.render().matches("<!DOCTYPE html>").count(), 1);
}

#[test]
fn test_display_matches_render() {
    let el = span().add_content("x");
    assert_eq!(format!("{el}"), "<span>x</span>");
    assert_eq!(el.to_string(), el.render());
}

#[test]
fn test_node_accessor_exposes_state() {
    let el = div().class(["a"]).add_content("x");
    assert_eq!(el.node().tag(), "div");
    assert_eq!(el.node().classes(), &["a".to_string()]);
    assert_eq!(el.node().child_count(), 1);
}

// ========== Text ==========

#[test]
fn test_content_list_matches_chained_content() {
    let listed = div().add_contents(content!["a<b>", 7_i32, None::<&str>]);
    let chained = div().add_content("a<b>").add_content(7_i32);
    assert_eq!(listed.render(), "<div>a<b>7</div>");
    assert_eq!(listed.render(), chained.render());
}

#[test]
fn test_plain_strings_are_raw() {
    assert_eq!(p().add_content("<b>x</b>").render(), "<p><b>x</b></p>");
}

#[test]
fn test_escaped_text_content() {
    assert_eq!(
        p().add_content(escape_string("a < b")).render(),
        "<p>a &lt; b</p>"
    );
    assert_eq!(
        p().add_content(escaped!("{} & {}", "a", "b")).render(),
        "<p>a &amp; b</p>"
    );
}

#[test]
fn test_mixed_content_values() {
    let el = td().add_contents(content![None::<&str>, true, 42_i32, " items", raw!("<br/>")]);
    assert_eq!(el.render(), "<td>true42 items<br/></td>");
}

// ========== Metadata ==========

#[test]
fn test_metadata_elements() {
    assert_eq!(
        link().rel("stylesheet").href("/a.css").render(),
        r#"<link rel="stylesheet" href="/a.css"/>"#
    );
    assert_eq!(
        meta().name("viewport").content("width=device-width").render(),
        r#"<meta name="viewport" content="width=device-width"/>"#
    );
    assert_eq!(base().href("/").target("_top").render(), r#"<base href="/" target="_top"/>"#);
    assert_eq!(title().add_content("Home").render(), "<title>Home</title>");
    assert_eq!(
        style().media("print").add_content("p{margin:0}").render(),
        r#"<style media="print">p{margin:0}</style>"#
    );
}

#[test]
fn test_script_flags() {
    let el = script().src("/app.js").defer().r#async();
    assert_eq!(el.render(), r#"<script src="/app.js" defer async></script>"#);
}

// ========== Tables ==========

#[test]
fn test_table_cells() {
    let el = table().add_content(
        tr().add_content(th().scope("col").col_span(2).add_content("H"))
            .add_content(td().row_span(3).headers("h1").add_content("D")),
    );
    assert_eq!(
        el.render(),
        concat!(
            "<table><tr>",
            "<th scope=\"col\" colspan=\"2\">H</th>",
            "<td rowspan=\"3\" headers=\"h1\">D</td>",
            "</tr></table>",
        )
    );
}

#[test]
fn test_col_span() {
    assert_eq!(
        colgroup().add_content(col().span(2)).render(),
        r#"<colgroup><col span="2"/></colgroup>"#
    );
}

// ========== Forms ==========

#[test]
fn test_form_with_button() {
    let el = form()
        .action("/s")
        .method("post")
        .no_validate()
        .add_content(button().r#type("submit").add_content("Go"));
    assert_eq!(
        el.render(),
        r#"<form action="/s" method="post" novalidate><button type="submit">Go</button></form>"#
    );
}

#[test]
fn test_input_attributes() {
    let el = input()
        .r#type("text")
        .name("q")
        .max_length(30)
        .placeholder("Search")
        .required();
    assert_eq!(
        el.render(),
        r#"<input type="text" name="q" maxlength="30" placeholder="Search" required/>"#
    );
}

#[test]
fn test_label_and_select() {
    assert_eq!(
        label().r#for("email").add_content("Email").render(),
        r#"<label for="email">Email</label>"#
    );

    let el = select()
        .name("size")
        .add_content(option().value("s").add_content("Small"))
        .add_content(option().value("m").selected().add_content("Medium"));
    assert_eq!(
        el.render(),
        concat!(
            "<select name=\"size\">",
            "<option value=\"s\">Small</option>",
            "<option value=\"m\" selected>Medium</option>",
            "</select>",
        )
    );
}

#[test]
fn test_textarea_dimensions() {
    assert_eq!(
        textarea().rows(4).cols(40).wrap("hard").render(),
        r#"<textarea rows="4" cols="40" wrap="hard"></textarea>"#
    );
}

#[test]
fn test_meter_range() {
    let el = meter().min("0").max("10").low(2).high("8").optimum(5);
    assert_eq!(
        el.render(),
        r#"<meter min="0" max="10" low="2" high="8" optimum="5"></meter>"#
    );
}

// ========== Media ==========

#[test]
fn test_video_attributes() {
    let el = video()
        .src("m.mp4")
        .controls()
        .preload("metadata")
        .plays_inline(true)
        .add_content(track().kind("captions").src_lang("en").default());
    assert_eq!(
        el.render(),
        concat!(
            "<video src=\"m.mp4\" controls preload=\"metadata\" playsinline=\"true\">",
            "<track kind=\"captions\" srclang=\"en\" default/>",
            "</video>",
        )
    );
}

#[test]
fn test_picture_sources() {
    let el = picture()
        .add_content(source().src_set("a.avif").r#type("image/avif"))
        .add_content(img().src("a.jpg").loading("lazy"));
    assert_eq!(
        el.render(),
        r#"<picture><source srcset="a.avif" type="image/avif"/><img src="a.jpg" loading="lazy"/></picture>"#
    );
}

// ========== Interactive ==========

#[test]
fn test_details_and_dialog() {
    let el = details()
        .open()
        .add_content(summary().add_content("More"))
        .add_content("Body");
    assert_eq!(el.render(), "<details open><summary>More</summary>Body</details>");
    assert_eq!(dialog().open_value(false).render(), r#"<dialog open="false"></dialog>"#);
}
