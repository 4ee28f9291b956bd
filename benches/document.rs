use deppairs::{DocumentParser, extract_pairs};
use divan::AllocProfiler;
use divan::{Bencher, black_box};

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

/// A document of `n` five-word sentences
fn synthetic_document(n: usize) -> String {
    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<text>\n");
    for i in 0..n {
        doc.push_str(&format!("<S ID=\"{}\">\n", i + 1));
        doc.push_str(r#"<W DOM="2" FEAT="A ЕД МУЖ ИМ" ID="1" LEMMA="Большой">Большой</W>"#);
        doc.push_str(r#"<W DOM="3" FEAT="S ЕД МУЖ ИМ ОД" ID="2" LEMMA="кот" LINK="предик">кот</W>"#);
        doc.push_str(r#"<W DOM="_root" FEAT="V НЕСОВ ИЗЪЯВ НЕПРОШ ЕД 3-Л" ID="3" LEMMA="читать">читает</W>"#);
        doc.push_str(r#"<W DOM="5" FEAT="A ЕД ЖЕН ВИН" ID="4" LEMMA="новый">новую</W>"#);
        doc.push_str(r#"<W DOM="3" FEAT="S ЕД ЖЕН ВИН НЕОД" ID="5" LEMMA="книга" LINK="1-компл">книгу</W>"#);
        doc.push_str("\n</S>\n");
    }
    doc.push_str("</text>\n");
    doc
}

#[divan::bench(args = [10, 100, 1000])]
fn parse(bencher: Bencher, n: usize) {
    let doc = synthetic_document(n);
    let mut parser = DocumentParser::new();
    bencher.bench_local(|| black_box(parser.parse(black_box(&doc)).unwrap()));
}

#[divan::bench(args = [10, 100, 1000])]
fn parse_and_extract(bencher: Bencher, n: usize) {
    let doc = synthetic_document(n);
    let mut parser = DocumentParser::new();
    bencher.bench_local(|| {
        let sentences = parser.parse(black_box(&doc)).unwrap();
        black_box(extract_pairs(&sentences).unwrap())
    });
}
