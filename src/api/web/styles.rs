//! Stylesheet for the prediction page

pub const STYLESHEET: &str = r#"
body {
    font-family: 'Roboto', system-ui, sans-serif;
    background: linear-gradient(to right, #00C6FF, #0072FF);
    color: #333;
    margin: 0;
    min-height: 100vh;
}
.layout { display: flex; gap: 24px; max-width: 1100px; margin: 0 auto; padding: 24px; }
.sidebar {
    flex: 0 0 240px;
    background-color: rgba(255, 255, 255, 0.85);
    padding: 30px;
    border-radius: 15px;
    box-shadow: 0px 6px 10px rgba(0, 0, 0, 0.1);
    backdrop-filter: blur(10px);
    align-self: flex-start;
}
.main { flex: 1; }
.header {
    font-size: 48px;
    color: white;
    font-weight: 700;
    text-align: center;
    text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.5);
}
.intro { text-align: center; font-size: 18px; color: white; }
.panel {
    background-color: rgba(255, 255, 255, 0.85);
    padding: 24px 30px;
    border-radius: 20px;
    box-shadow: 0px 4px 6px rgba(0, 0, 0, 0.2);
    margin-bottom: 20px;
}
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 12px 32px; }
.control label { display: block; font-weight: 600; margin-bottom: 4px; }
.control input[type=range] { width: 100%; }
.control .bounds { font-size: 12px; color: #666; display: flex; justify-content: space-between; }
.control output { font-weight: 700; color: #0072FF; }
.button, .download-button {
    background-color: #4CAF50;
    color: white;
    border-radius: 12px;
    font-size: 18px;
    padding: 15px 30px;
    border: none;
    box-shadow: 0px 4px 6px rgba(0, 0, 0, 0.1);
    transition: all 0.3s ease;
    cursor: pointer;
}
.download-button { font-size: 16px; padding: 14px 20px; }
.button:hover, .download-button:hover { background-color: #45a049; transform: scale(1.05); }
.result-card {
    background-color: rgba(255, 255, 255, 0.85);
    padding: 30px;
    border-radius: 20px;
    box-shadow: 0px 4px 6px rgba(0, 0, 0, 0.2);
    margin-bottom: 20px;
    font-size: 18px;
    text-align: center;
    transition: all 0.3s ease;
}
.result-card:hover { transform: scale(1.02); }
.result-card-high-risk { background-color: rgba(255, 99, 71, 0.85); color: white; }
.result-card-low-risk { background-color: rgba(144, 238, 144, 0.85); color: white; }
.error-card {
    background-color: rgba(255, 255, 255, 0.95);
    border-left: 6px solid #d9534f;
    padding: 16px 24px;
    border-radius: 12px;
    margin-bottom: 20px;
}
"#;
