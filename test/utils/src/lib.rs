pub fn mempool_fixture() -> &'static str {
    return r#"
<!DOCTYPE html>
<html>
  <head><title>mempool - Bitcoin Explorer</title></head>
  <body>
    <header>
      <a href="/">mempool</a>
      <span class="text-xl font-bold">
        $67,412
      </span>
    </header>
    <div class="blocks">
      <a href="/block/000000000000000000021f3c0b1d2e">851234</a>
      <a href="/block/000000000000000000011a9e7c4f8b">851233</a>
    </div>
  </body>
</html>
"#
    .trim();
}

pub fn google_range_fixture() -> &'static str {
    return r#"
<!DOCTYPE html>
<html>
  <body>
    <div id="search">
      <div class="card">
        <span>Bitcoin</span>
        <div class="range">30000 - 32000</div>
      </div>
    </div>
  </body>
</html>
"#
    .trim();
}

pub fn coinmarketcap_volume_fixture() -> &'static str {
    return r#"
<!DOCTYPE html>
<html>
  <body>
    <dl>
      <div class="statsBlock">
        <dt>Volume (24h)</dt>
        <div class="statsValue___2iaoZ"> $28,914,771,204 </div>
      </div>
    </dl>
  </body>
</html>
"#
    .trim();
}

pub fn coinmarketcap_rsi_fixture() -> &'static str {
    return r#"
<!DOCTYPE html>
<html>
  <body>
    <table>
      <tr>
        <td><span>MACD</span></td>
        <td><span>-120.4</span></td>
      </tr>
      <tr>
        <td><span>RSI</span></td>
        <td><span> 58.21 </span></td>
      </tr>
    </table>
  </body>
</html>
"#
    .trim();
}

pub fn empty_page_fixture() -> &'static str {
    return "<!DOCTYPE html><html><head></head><body><p>Nothing to see here.</p></body></html>";
}
